use std::env;
use std::fs;
use std::path::Path;

/// Кладёт `config.toml` рядом с бинарником backend (target/debug или target/release).
/// Если файла нет, сервер стартует со встроенной конфигурацией.
fn main() {
    println!("cargo:rerun-if-changed=config.toml");

    let (Ok(out_dir), Ok(profile)) = (env::var("OUT_DIR"), env::var("PROFILE")) else {
        return;
    };

    // OUT_DIR: target/<profile>/build/invoice-backend-xxx/out
    let Some(target_dir) = Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
    else {
        println!("cargo:warning=target profile directory not found, config.toml not copied");
        return;
    };

    let source_config = Path::new(env!("CARGO_MANIFEST_DIR")).join("config.toml");
    if !source_config.exists() {
        println!("cargo:warning=config.toml not found, the embedded default will be used (see config.example.toml)");
        return;
    }

    let dest_config = target_dir.join("config.toml");
    if let Err(e) = fs::copy(&source_config, &dest_config) {
        panic!("Failed to copy config.toml to {:?}: {}", dest_config, e);
    }
}
