//! Состояние выбора клиента в форме счёта ("Invoice To").
//!
//! Справочник запрашивается один раз на активацию формы. Первый успешный
//! ответ фиксирует список и выбирает первого клиента; все последующие
//! ответы игнорируются.

use super::aggregate::{find_by_name, Client};

/// Состояние справочника клиентов
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DirectoryState {
    #[default]
    Loading,
    Loaded(Vec<Client>),
    /// Запрос к справочнику завершился ошибкой
    Unavailable(String),
}

/// Результат применения ответа справочника
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryUpdate {
    Applied,
    /// Список уже был установлен ранее
    Ignored,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClientSelection {
    selected_name: String,
    directory: DirectoryState,
}

impl ClientSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn directory(&self) -> &DirectoryState {
        &self.directory
    }

    pub fn selected_name(&self) -> &str {
        &self.selected_name
    }

    pub fn clients(&self) -> Option<&[Client]> {
        match &self.directory {
            DirectoryState::Loaded(clients) => Some(clients),
            _ => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.directory, DirectoryState::Loaded(_))
    }

    /// Применить ответ справочника клиентов.
    ///
    /// Пустой список сохраняется как загруженный, но без выбранного клиента.
    pub fn apply_response(&mut self, response: Result<Vec<Client>, String>) -> DirectoryUpdate {
        if self.is_loaded() {
            return DirectoryUpdate::Ignored;
        }
        match response {
            Ok(clients) => {
                if let Some(first) = clients.first() {
                    self.selected_name = first.name.clone();
                }
                self.directory = DirectoryState::Loaded(clients);
                DirectoryUpdate::Applied
            }
            Err(e) => {
                self.directory = DirectoryState::Unavailable(e);
                DirectoryUpdate::Failed
            }
        }
    }

    /// Вернуть справочник в состояние загрузки после ошибки.
    /// Возвращает `false`, если повторный запрос не нужен.
    pub fn retry(&mut self) -> bool {
        if matches!(self.directory, DirectoryState::Unavailable(_)) {
            self.directory = DirectoryState::Loading;
            true
        } else {
            false
        }
    }

    /// Выбор клиента в выпадающем списке
    pub fn select(&mut self, name: impl Into<String>) {
        self.selected_name = name.into();
    }

    /// Клиент с точным совпадением имени; `None`, пока список не загружен
    pub fn selected_client(&self) -> Option<&Client> {
        self.clients()
            .and_then(|clients| find_by_name(clients, &self.selected_name))
    }
}
