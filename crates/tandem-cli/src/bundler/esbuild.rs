use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};
use std::process::Stdio;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use tandem_config::BuildDescriptor;
use tokio::process::Command;
use tracing::{debug, info, warn};

use super::{BundleReport, Bundler, BundlerError};

/// Drives the esbuild executable (or anything with the same command line)
#[derive(Debug, Clone)]
pub struct Esbuild {
    program: PathBuf,
}

impl Esbuild {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Command-line arguments for `descriptor`, entry points first and in
    /// declaration order, loader rules in declaration order.
    ///
    /// Relative entries are written as `./entry` so a file named `-x.js`
    /// is never read as a flag.
    pub fn args(descriptor: &BuildDescriptor) -> Vec<OsString> {
        let mut args: Vec<OsString> = descriptor
            .entry_points()
            .iter()
            .map(|entry| entry_arg(entry))
            .collect();

        if descriptor.bundle() {
            args.push("--bundle".into());
        }

        let mut outfile = OsString::from("--outfile=");
        outfile.push(descriptor.output_path());
        args.push(outfile);

        args.push(format!("--target={}", descriptor.target()).into());

        for (extension, loader) in descriptor.loaders() {
            args.push(format!("--loader:{extension}={loader}").into());
        }
        if descriptor.minify() {
            args.push("--minify".into());
        }
        if descriptor.sourcemap() {
            args.push("--sourcemap".into());
        }
        args
    }

    /// The invocation as one printable line
    pub fn command_line(&self, descriptor: &BuildDescriptor) -> String {
        std::iter::once(self.program.as_os_str().to_os_string())
            .chain(Self::args(descriptor))
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn entry_arg(entry: &Path) -> OsString {
    match entry.components().next() {
        Some(Component::Normal(_)) => Path::new(".").join(entry).into_os_string(),
        _ => entry.as_os_str().to_os_string(),
    }
}

/// Start of the current second. Filesystems with coarse timestamps would
/// otherwise date a fresh write before the spawn.
fn spawn_floor() -> SystemTime {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|since| UNIX_EPOCH + Duration::from_secs(since.as_secs()))
        .unwrap_or_else(|_| SystemTime::now())
}

#[async_trait]
impl Bundler for Esbuild {
    fn name(&self) -> &str {
        "esbuild"
    }

    async fn bundle(
        &self,
        descriptor: &BuildDescriptor,
        root: &Path,
    ) -> Result<BundleReport, BundlerError> {
        let program = self.program.display().to_string();
        let output = root.join(descriptor.output_path());

        debug!(
            command = %self.command_line(descriptor),
            cwd = %root.display(),
            "spawning bundler"
        );

        let floor = spawn_floor();
        let started = Instant::now();
        let result = Command::new(&self.program)
            .args(Self::args(descriptor))
            .current_dir(root)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| BundlerError::Spawn {
                program: program.clone(),
                source,
            })?;
        let duration = started.elapsed();

        let stderr = String::from_utf8_lossy(&result.stderr).trim().to_string();
        if !result.status.success() {
            warn!(program = %program, status = ?result.status.code(), "bundler failed");
            return Err(BundlerError::Failed {
                program,
                code: result.status.code(),
                stderr,
            });
        }

        // A file left over from an earlier build does not count
        let metadata = match tokio::fs::metadata(&output).await {
            Ok(metadata)
                if metadata.is_file()
                    && metadata.modified().map_or(true, |modified| modified >= floor) =>
            {
                metadata
            }
            _ => {
                return Err(BundlerError::MissingOutput {
                    program,
                    path: output,
                });
            }
        };

        info!(
            output = %output.display(),
            bytes = metadata.len(),
            elapsed_ms = duration.as_millis() as u64,
            "bundle written"
        );

        Ok(BundleReport {
            output,
            size: metadata.len(),
            duration,
            diagnostics: stderr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tandem_config::{BuildSource, EsTarget, Loader, SchemaValidator};

    fn descriptor(source: BuildSource) -> BuildDescriptor {
        BuildDescriptor::load_with(&source, &SchemaValidator).unwrap()
    }

    fn strings(args: Vec<OsString>) -> Vec<String> {
        args.into_iter()
            .map(|arg| arg.into_string().unwrap())
            .collect()
    }

    #[test]
    fn default_descriptor_args() {
        let args = Esbuild::args(&descriptor(BuildSource::new("src/app.js", "dist/app.js")));
        assert_eq!(
            strings(args),
            vec!["./src/app.js", "--bundle", "--outfile=dist/app.js", "--target=es2015"]
        );
    }

    #[test]
    fn full_descriptor_args_keep_declaration_order() {
        let mut source = BuildSource::new("src/app.js", "dist/app.js")
            .with_loader(".html", Loader::Text)
            .with_loader(".png", Loader::DataUrl);
        source.entry_points.push("src/worker.js".into());
        source.bundle = false;
        source.target = EsTarget::Es2020;
        source.minify = true;
        source.sourcemap = true;

        let args = Esbuild::args(&descriptor(source));
        assert_eq!(
            strings(args),
            vec![
                "./src/app.js",
                "./src/worker.js",
                "--outfile=dist/app.js",
                "--target=es2020",
                "--loader:.html=text",
                "--loader:.png=dataurl",
                "--minify",
                "--sourcemap",
            ]
        );
    }

    #[test]
    fn command_line_starts_with_program() {
        let bundler = Esbuild::new("node_modules/.bin/esbuild");
        let line = bundler.command_line(&descriptor(BuildSource::new("a.js", "b.js")));
        assert!(line.starts_with("node_modules/.bin/esbuild ./a.js --bundle"));
    }

    #[test]
    fn dash_entries_are_not_read_as_flags() {
        let mut source = BuildSource::new("-weird.js", "dist/app.js");
        source.entry_points.push("./already.js".into());
        source.entry_points.push("../shared/lib.js".into());
        source.entry_points.push("/abs/main.js".into());

        let args = strings(Esbuild::args(&descriptor(source)));
        assert_eq!(
            &args[..4],
            ["./-weird.js", "./already.js", "../shared/lib.js", "/abs/main.js"]
        );
    }

    #[tokio::test]
    async fn missing_program_is_a_spawn_error() {
        let dir = tempfile::tempdir().unwrap();
        let bundler = Esbuild::new(dir.path().join("no-such-bundler"));
        let err = bundler
            .bundle(&descriptor(BuildSource::new("a.js", "b.js")), dir.path())
            .await
            .unwrap_err();
        assert!(matches!(err, BundlerError::Spawn { .. }));
    }
}
