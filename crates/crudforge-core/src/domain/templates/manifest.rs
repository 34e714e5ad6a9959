//! Package manifest and compiler configuration.
//!
//! Both are functions of [`ProjectSettings`] alone. The entity never
//! reaches them.

use serde_json::{Value, json};

use crate::domain::{entities::ProjectSettings, value_objects::SyntaxProfile};

const PACKAGE_VERSION: &str = "1.0.0";

const RUNTIME_DEPENDENCIES: &[(&str, &str)] = &[("express", "^4.19.2"), ("mongoose", "^8.4.0")];

const TYPED_DEV_DEPENDENCIES: &[(&str, &str)] = &[
    ("@types/express", "^4.17.21"),
    ("@types/node", "^20.12.7"),
    ("ts-node-dev", "^2.0.0"),
    ("typescript", "^5.4.5"),
];

const UNTYPED_DEV_DEPENDENCIES: &[(&str, &str)] = &[("nodemon", "^3.1.0")];

fn dependency_map(entries: &[(&str, &str)]) -> Value {
    Value::Object(
        entries
            .iter()
            .map(|(name, version)| ((*name).to_string(), Value::from(*version)))
            .collect(),
    )
}

fn pretty(value: &Value) -> String {
    format!("{value:#}\n")
}

pub fn package_manifest(settings: &ProjectSettings) -> String {
    let manifest = match settings.profile {
        SyntaxProfile::Typed => json!({
            "name": settings.project_name,
            "version": PACKAGE_VERSION,
            "private": true,
            "main": "dist/index.js",
            "scripts": {
                "build": "tsc",
                "start": "node dist/index.js",
                "dev": "ts-node-dev src/index.ts",
            },
            "dependencies": dependency_map(RUNTIME_DEPENDENCIES),
            "devDependencies": dependency_map(TYPED_DEV_DEPENDENCIES),
        }),
        SyntaxProfile::Untyped => json!({
            "name": settings.project_name,
            "version": PACKAGE_VERSION,
            "private": true,
            "main": "src/index.js",
            "scripts": {
                "start": "node src/index.js",
                "dev": "nodemon src/index.js",
            },
            "dependencies": dependency_map(RUNTIME_DEPENDENCIES),
            "devDependencies": dependency_map(UNTYPED_DEV_DEPENDENCIES),
        }),
    };
    pretty(&manifest)
}

pub fn compiler_config() -> String {
    pretty(&json!({
        "compilerOptions": {
            "target": "ES2020",
            "module": "commonjs",
            "outDir": "./dist",
            "rootDir": "./src",
            "strict": true,
            "esModuleInterop": true,
            "skipLibCheck": true,
            "forceConsistentCasingInFileNames": true,
        },
        "include": ["src/**/*"],
    }))
}
