use ado::meta::{BuildInfo, EnvInfo};

pub fn render_build_info(info: &BuildInfo) -> String {
    let mut out = String::new();
    out.push_str(&format!("Name: {}\n", info.name));
    out.push_str(&format!("Version: {}\n", info.version));
    out.push_str(&format!("Commit: {}\n", info.commit));
    out.push_str(&format!("BuildTime: {}\n", info.build_time));
    out.push_str(&format!("RustcVersion: {}\n", info.rustc_version));
    out.push_str(&format!("Platform: {}\n", info.platform));
    out
}

pub fn render_env_info(info: &EnvInfo) -> String {
    let mut out = String::new();

    let config_path = if info.config_path.is_empty() {
        "(none resolved)"
    } else {
        info.config_path.as_str()
    };
    out.push_str(&format!("ConfigPath: {}\n", config_path));

    out.push_str("ConfigSources:\n");
    if info.config_sources.is_empty() {
        out.push_str("  (none)\n");
    }
    for source in &info.config_sources {
        out.push_str(&format!("  - {}\n", source));
    }

    out.push_str(&format!("HomeDir: {}\n", info.home_dir));
    out.push_str(&format!("CacheDir: {}\n", info.cache_dir));

    out.push_str("EnvVariables:\n");
    if info.env.is_empty() {
        out.push_str("  (none set)\n");
    }
    for (key, value) in &info.env {
        out.push_str(&format!("  {}={}\n", key, value));
    }

    out
}

pub fn render_features(features: &[String]) -> String {
    if features.is_empty() {
        return "No experimental features enabled".to_string();
    }
    features.join("\n")
}
