use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Копирует config.toml и seed каталога рядом с бинарником,
/// т.к. рантайм ищет их относительно исполняемого файла.
fn main() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("Could not find workspace root")
        .to_path_buf();

    let source_config = workspace_root.join("config.toml");
    let source_seed = manifest_dir.join("data").join("catalog_seed.json");
    println!("cargo:rerun-if-changed={}", source_config.display());
    println!("cargo:rerun-if-changed={}", source_seed.display());

    // OUT_DIR: target/<profile>/build/backend-xxx/out
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is not set");
    let profile = env::var("PROFILE").expect("PROFILE is not set");
    let target_dir = Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .expect("Could not find target profile directory")
        .to_path_buf();

    copy_if_exists(&source_config, &target_dir.join("config.toml"));
    copy_if_exists(
        &source_seed,
        &target_dir.join("data").join("catalog_seed.json"),
    );
}

fn copy_if_exists(source: &Path, dest: &Path) {
    if !source.exists() {
        println!("cargo:warning={:?} not found, runtime will use embedded defaults", source);
        return;
    }
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create {:?}: {}", parent, e));
    }
    fs::copy(source, dest).unwrap_or_else(|e| panic!("Failed to copy {:?}: {}", source, e));
}
