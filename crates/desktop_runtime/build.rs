use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const APP_CRATES: [&str; 6] = ["about", "work", "projects", "contact", "settings", "arcade"];
const KNOWN_APP_IDS: [&str; 7] = [
    "about",
    "work",
    "projects",
    "contact",
    "settings",
    "flappy-bird",
    "dino-game",
];
const SIZE_CLASSES: [&str; 3] = ["small", "medium", "large"];

#[derive(Debug, Deserialize)]
struct ManifestFile {
    schema_version: u32,
    apps: Vec<AppManifest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppManifest {
    app_id: String,
    display_name: String,
    tile_label: String,
    icon: String,
    size_class: String,
    launcher_order: u32,
    show_on_launcher: bool,
}

fn app_manifest_paths(root: &Path) -> Vec<PathBuf> {
    APP_CRATES
        .iter()
        .map(|name| {
            root.join("..")
                .join("apps")
                .join(name)
                .join("app.manifest.toml")
        })
        .collect()
}

fn validate(path: &Path, manifest: &AppManifest, seen: &mut BTreeSet<String>) {
    if !KNOWN_APP_IDS.contains(&manifest.app_id.as_str()) {
        panic!("unknown app id `{}` in {}", manifest.app_id, path.display());
    }
    if !SIZE_CLASSES.contains(&manifest.size_class.as_str()) {
        panic!(
            "unknown size class `{}` for `{}` in {}",
            manifest.size_class,
            manifest.app_id,
            path.display()
        );
    }
    if !seen.insert(manifest.app_id.clone()) {
        panic!("duplicate app id `{}` in {}", manifest.app_id, path.display());
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let mut manifests = Vec::<AppManifest>::new();
    let mut seen = BTreeSet::new();

    for path in app_manifest_paths(&crate_root) {
        println!("cargo:rerun-if-changed={}", path.display());
        let raw = fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
        let file: ManifestFile = toml::from_str(&raw)
            .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
        if file.schema_version != 1 {
            panic!(
                "manifest schema mismatch in {}: expected 1 found {}",
                path.display(),
                file.schema_version
            );
        }
        for manifest in file.apps {
            validate(&path, &manifest, &mut seen);
            manifests.push(manifest);
        }
    }

    if seen.len() != KNOWN_APP_IDS.len() {
        let missing: Vec<_> = KNOWN_APP_IDS
            .iter()
            .filter(|id| !seen.contains(**id))
            .collect();
        panic!("app manifests missing for {missing:?}");
    }

    manifests.sort_by(|a, b| {
        a.launcher_order
            .cmp(&b.launcher_order)
            .then_with(|| a.app_id.cmp(&b.app_id))
    });
    let json = serde_json::to_string_pretty(&manifests).expect("serialize app manifest catalog");
    let generated = format!(
        "/// Build-time generated app manifest catalog JSON.\n\
pub const APP_MANIFEST_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("app_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
