//! Running-container discovery and the picker screen state.

use serde::Deserialize;
use tracing::{debug, info};

use crate::{backend::CommandRunner, error::DiscoveryError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Container {
    pub id: String,
    pub name: String,
    pub image: String,
    pub status: String,
}

/// One line of `docker ps --format '{{json .}}'`
#[derive(Deserialize)]
struct PsLine {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Names")]
    names: String,
    #[serde(rename = "Image", default)]
    image: String,
    #[serde(rename = "Status", default)]
    status: String,
}

impl From<PsLine> for Container {
    fn from(line: PsLine) -> Self {
        let name = line
            .names
            .split(',')
            .next()
            .unwrap_or_default()
            .trim()
            .trim_start_matches('/')
            .to_owned();
        Self {
            id: line.id,
            name,
            image: line.image,
            status: line.status,
        }
    }
}

/// List running containers through the container CLI.
pub fn discover<R: CommandRunner + ?Sized>(docker: &str, runner: &R) -> Result<Vec<Container>, DiscoveryError> {
    let args = vec![
        "ps".to_owned(),
        "--format".to_owned(),
        "{{json .}}".to_owned(),
    ];
    debug!(program = docker, ?args, "listing containers");

    let output = runner
        .run(docker, &args)
        .map_err(|source| DiscoveryError::Spawn {
            program: docker.to_owned(),
            source,
        })?;

    if !output.success {
        return Err(DiscoveryError::Status(output.error_text()));
    }

    let containers = parse_ps(&String::from_utf8_lossy(&output.stdout))?;
    info!(count = containers.len(), "discovered containers");
    Ok(containers)
}

fn parse_ps(stdout: &str) -> Result<Vec<Container>, DiscoveryError> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            serde_json::from_str::<PsLine>(line)
                .map(Container::from)
                .map_err(DiscoveryError::from)
        })
        .collect()
}

// ============================================================================
// Picker
// ============================================================================

pub struct ContainerPicker {
    containers: Vec<Container>,
    cursor: usize,
}

impl ContainerPicker {
    pub fn new(containers: Vec<Container>) -> Self {
        Self {
            containers,
            cursor: 0,
        }
    }

    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let last = self.containers.len().saturating_sub(1) as isize;
        self.cursor = (self.cursor as isize).saturating_add(delta).clamp(0, last) as usize;
    }

    pub fn selected(&self) -> Option<&Container> {
        self.containers.get(self.cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{CommandOutput, testing::RecordingRunner};

    const PS_OUTPUT: &str = concat!(
        r#"{"Command":"\"nginx -g\"","ID":"4f1c2a","Image":"nginx:1.27","Names":"web","Status":"Up 2 hours"}"#,
        "\n",
        r#"{"ID":"9b0e77","Image":"postgres:16","Names":"/db,app/db","Status":"Up 5 minutes"}"#,
        "\n\n",
    );

    #[test]
    fn test_parse_ps() {
        let containers = parse_ps(PS_OUTPUT).unwrap();
        assert_eq!(containers.len(), 2);
        assert_eq!(
            containers[0],
            Container {
                id: "4f1c2a".to_owned(),
                name: "web".to_owned(),
                image: "nginx:1.27".to_owned(),
                status: "Up 2 hours".to_owned(),
            }
        );
        assert_eq!(containers[1].name, "db");
    }

    #[test]
    fn test_parse_ps_rejects_garbage() {
        assert!(matches!(parse_ps("not json"), Err(DiscoveryError::Parse(_))));
    }

    #[test]
    fn test_discover_runs_docker_ps() {
        let runner = RecordingRunner::replying(CommandOutput {
            success: true,
            code: Some(0),
            stdout: PS_OUTPUT.as_bytes().to_vec(),
            stderr: Vec::new(),
        });

        let containers = discover("docker", &runner).unwrap();
        assert_eq!(containers.len(), 2);
        let calls = runner.calls.borrow();
        assert_eq!(calls[0].0, "docker");
        assert_eq!(calls[0].1, vec!["ps", "--format", "{{json .}}"]);
    }

    #[test]
    fn test_discover_reports_daemon_errors() {
        let runner = RecordingRunner::replying(CommandOutput {
            success: false,
            code: Some(1),
            stdout: Vec::new(),
            stderr: b"Cannot connect to the Docker daemon".to_vec(),
        });

        match discover("docker", &runner) {
            Err(DiscoveryError::Status(msg)) => assert_eq!(msg, "Cannot connect to the Docker daemon"),
            other => panic!("unexpected result: {:?}", other.map(|c| c.len())),
        }
    }

    #[test]
    fn test_picker_cursor_is_clamped() {
        let mut picker = ContainerPicker::new(parse_ps(PS_OUTPUT).unwrap());
        picker.move_cursor(-1);
        assert_eq!(picker.cursor(), 0);
        picker.move_cursor(5);
        assert_eq!(picker.cursor(), 1);
        assert_eq!(picker.selected().map(|c| c.name.as_str()), Some("db"));
    }

    #[test]
    fn test_empty_picker() {
        let mut picker = ContainerPicker::new(Vec::new());
        picker.move_cursor(1);
        assert_eq!(picker.cursor(), 0);
        assert!(picker.selected().is_none());
    }
}
