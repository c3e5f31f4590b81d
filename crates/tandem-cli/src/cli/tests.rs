#[cfg(test)]
mod tests {
    use crate::cli::validation::parse_dir;
    use crate::cli::{Cli, Command, SettingsFormat};
    use clap::{CommandFactory, Parser, ValueEnum};
    use serial_test::serial;
    use std::path::PathBuf;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_dir_accepts_existing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let arg = dir.path().to_str().unwrap();
        assert_eq!(parse_dir(arg), Ok(PathBuf::from(arg)));
    }

    #[test]
    fn parse_dir_rejects_missing_and_files() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("tandem.toml");
        std::fs::write(&file, "").unwrap();

        assert!(parse_dir("").is_err());
        assert!(parse_dir(dir.path().join("nope").to_str().unwrap()).is_err());
        assert!(parse_dir(file.to_str().unwrap()).unwrap_err().contains("Not a directory"));
    }

    #[test]
    fn settings_format_values() {
        let names: Vec<_> = SettingsFormat::value_variants()
            .iter()
            .map(|v| v.to_possible_value().unwrap().get_name().to_string())
            .collect();
        assert_eq!(names, vec!["text", "json", "env"]);
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        let result = Cli::try_parse_from(["tandem", "--verbose", "--quiet", "check"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["tandem", "settings", "--no-color", "-v"]).unwrap();
        assert!(cli.no_color);
        assert!(cli.verbose);
    }

    #[test]
    #[serial]
    fn build_defaults() {
        unsafe {
            std::env::remove_var("TANDEM_BUNDLER");
        }
        let cli = Cli::try_parse_from(["tandem", "build"]).unwrap();
        let Command::Build(build) = cli.command else {
            panic!("expected build command");
        };
        assert_eq!(build.bundler, PathBuf::from("esbuild"));
        assert!(!build.dry_run);
        assert!(build.project.cwd.is_none());
        assert!(build.project.config.is_none());
    }

    #[test]
    #[serial]
    fn bundler_from_environment() {
        unsafe {
            std::env::set_var("TANDEM_BUNDLER", "/opt/esbuild/bin/esbuild");
        }
        let cli = Cli::try_parse_from(["tandem", "build", "--dry-run"]).unwrap();
        unsafe {
            std::env::remove_var("TANDEM_BUNDLER");
        }
        let Command::Build(build) = cli.command else {
            panic!("expected build command");
        };
        assert_eq!(build.bundler, PathBuf::from("/opt/esbuild/bin/esbuild"));
        assert!(build.dry_run);
    }

    #[test]
    fn check_sections_conflict() {
        let result = Cli::try_parse_from(["tandem", "check", "--build-only", "--settings-only"]);
        assert!(result.is_err());
    }

    #[test]
    fn settings_format_flag() {
        let cli = Cli::try_parse_from(["tandem", "settings", "--format", "env", "-c", "app.toml"])
            .unwrap();
        let Command::Settings(settings) = cli.command else {
            panic!("expected settings command");
        };
        assert_eq!(settings.format, SettingsFormat::Env);
        assert_eq!(settings.project.config, Some(PathBuf::from("app.toml")));
    }

    #[test]
    fn cwd_must_exist() {
        let result = Cli::try_parse_from(["tandem", "check", "--cwd", "/definitely/not/here"]);
        assert!(result.is_err());
    }

    #[test]
    fn init_force() {
        let cli = Cli::try_parse_from(["tandem", "init", "--force"]).unwrap();
        assert!(matches!(cli.command, Command::Init(init) if init.force && init.cwd.is_none()));
    }
}
