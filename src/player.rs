use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

/// Launch the configured player for `path`, detached.
///
/// `template` is an argv vector; every `{path}` occurrence is substituted
/// with the entry's path, so paths with spaces need no shell quoting. The
/// child gets null stdio and is never waited on; whether it plays anything
/// is its own business.
pub fn launch(template: &[String], path: &Path) -> io::Result<()> {
    let path_text = path.to_string_lossy();
    let mut argv: Vec<String> = template
        .iter()
        .map(|arg| arg.replace("{path}", &path_text))
        .collect();
    if argv.is_empty() {
        return Ok(());
    }
    let program = argv.remove(0);
    debug!("launching {program} {argv:?}");
    Command::new(program)
        .args(argv)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn empty_template_is_a_noop() {
        launch(&[], Path::new("/tmp/x.mkv")).unwrap();
    }

    #[test]
    fn substitution_reaches_every_arg() {
        let template = ["{path}".to_string(), "--sub={path}".to_string()];
        let path = PathBuf::from("/m/a file.mkv");
        let rendered: Vec<String> = template
            .iter()
            .map(|a| a.replace("{path}", &path.to_string_lossy()))
            .collect();
        assert_eq!(rendered, ["/m/a file.mkv", "--sub=/m/a file.mkv"]);
    }

    #[test]
    fn missing_program_surfaces_an_io_error() {
        let template = vec!["definitely-not-a-player-9f3a".to_string(), "{path}".to_string()];
        assert!(launch(&template, Path::new("/tmp/x.mkv")).is_err());
    }
}
