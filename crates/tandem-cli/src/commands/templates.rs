//! Starter files written by `tandem init`.

/// Starter `tandem.toml`: one entry bundled to `dist/app.js`, everything
/// served from localhost over plain http.
pub const TANDEM_TOML: &str = r#"# Tandem project file. Relative paths resolve against this directory.
# Any value can be overridden from the environment, e.g.
#   TANDEM_SETTINGS__PORTS__WEB=8080 tandem settings

[build]
entry_points = ["src/app.js"]
outfile = "dist/app.js"
bundle = true
target = "es2015"
minify = true
sourcemap = true

[build.loaders]
".html" = "text"

[settings]
debug = false
# "http" or "https"; https also needs cert_path and key_path
protocol = "http"
host = "localhost"
start_page = "src/index.html"
error_page = "src/other/404.html"
# Must be true exactly when protocol is "https"
backend_production = false
# cert_path = "ssl/cert.pem"
# key_path = "ssl/key.pem"

[settings.ports]
web = 8000
hot_reload = 5000
backend = 7000
relay = 7001
"#;
