//! Общие типы фронтенда и бэкенда редактора счетов.
//!
//! Вся логика состояния формы (выбор клиента, строки счёта, итоги) живёт
//! здесь, чтобы её можно было тестировать без браузера.

pub mod domain;
pub mod shared;
