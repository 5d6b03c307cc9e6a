use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Covitrack";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get the application data directory
/// ~/Covitrack/ on all platforms (user-visible, per design requirement)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("Covitrack")
}

/// Default location of the tracking database
pub fn database_path() -> PathBuf {
    app_data_dir().join("covitrack.db")
}

/// Default tracing filter when RUST_LOG is unset
pub fn default_log_filter() -> String {
    format!("info,{}=debug", env!("CARGO_PKG_NAME"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_data_dir_under_home() {
        let dir = app_data_dir();
        let home = dirs::home_dir().unwrap();
        assert!(dir.starts_with(home));
        assert!(dir.ends_with("Covitrack"));
    }

    #[test]
    fn database_path_under_app_data() {
        let db = database_path();
        let app = app_data_dir();
        assert!(db.starts_with(app));
        assert!(db.ends_with("covitrack.db"));
    }

    #[test]
    fn app_name_is_covitrack() {
        assert_eq!(APP_NAME, "Covitrack");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn default_filter_names_the_crate() {
        assert!(default_log_filter().contains("covitrack"));
    }
}
