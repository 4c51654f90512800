use crate::prelude::*;

pub mod prelude {
    pub use super::{
        TasksetFileType,
        TasksetParseError,
        parse_taskset,
    };
}

#[derive(Debug)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
#[derive(clap::ValueEnum)]
pub enum TasksetFileType {
    Auto,
    JSON,
    Plain,
}

#[derive(Debug)]
pub enum TasksetParseError {
    IOError(std::io::Error),
    JSONError(serde_json::Error),
    PlainParseError(String),
}

/// Loads a task set from a `.json` array of `{wcet,deadline,period}` objects
/// or a plain whitespace-separated `wcet deadline period` file, one task per
/// line, both in ticks.
pub fn parse_taskset(taskset: &str, typ: TasksetFileType) -> Result<Vec<TaskParams>, TasksetParseError> {
    use TasksetFileType::*;

    let path = std::path::Path::new(taskset);
    let extension =
        if typ == TasksetFileType::Auto {
            if path.extension().is_some_and(|ext| ext == "json") {
                TasksetFileType::JSON
            } else {
                TasksetFileType::Plain
            }
        } else { typ };

    let taskset_data = std::fs::read_to_string(path)?;

    let taskset_data = match extension {
        Auto => unreachable!("Auto is resolved above"),
        JSON => serde_json::from_str(&taskset_data)?,
        Plain => plain_deserialize_taskset(&taskset_data)?,
    };

    Ok(taskset_data)
}

fn plain_deserialize_taskset(data: &str) -> Result<Vec<TaskParams>, TasksetParseError> {
    data.trim_ascii()
        .lines()
        .filter(|line| !line.trim_ascii().is_empty())
        .map(plain_deserialize_task)
        .collect()
}

fn plain_deserialize_task(data: &str) -> Result<TaskParams, TasksetParseError> {
    let fields: Vec<&str> = data
        .trim_ascii()
        .split_ascii_whitespace()
        .collect();

    if fields.len() != 3 {
        return Err(TasksetParseError::PlainParseError(
            "task parsing requires three numeric fields (wcet, deadline and period), in ticks".to_owned()
        ));
    }

    Ok(TaskParams {
        wcet: fields[0].parse()
            .map_err(|err| TasksetParseError::PlainParseError(format!("Failed to parse field 'wcet': {err}")))?,
        deadline: fields[1].parse()
            .map_err(|err| TasksetParseError::PlainParseError(format!("Failed to parse field 'deadline': {err}")))?,
        period: fields[2].parse()
            .map_err(|err| TasksetParseError::PlainParseError(format!("Failed to parse field 'period': {err}")))?,
    })
}

// =============================================================================

impl std::fmt::Display for TasksetParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Taskset Parse Error, ")?;
        match self {
            TasksetParseError::IOError(error) => write!(f, "IO: {error}")?,
            TasksetParseError::JSONError(error) => write!(f, "JSON: {error}")?,
            TasksetParseError::PlainParseError(error) => write!(f, "Plain: {error}")?,
        };

        Ok(())
    }
}

impl std::error::Error for TasksetParseError {}

impl From<std::io::Error> for TasksetParseError {
    fn from(value: std::io::Error) -> Self {
        Self::IOError(value)
    }
}

impl From<serde_json::Error> for TasksetParseError {
    fn from(value: serde_json::Error) -> Self {
        Self::JSONError(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_parses_three_fields_per_line() {
        let taskset = plain_deserialize_taskset("100 250 500\n150 500 1000\n").unwrap();

        assert_eq!(taskset.len(), 2);
        assert_eq!(taskset[0].wcet, 100);
        assert_eq!(taskset[1].period, 1000);
    }

    #[test]
    fn plain_rejects_wrong_field_count() {
        assert!(plain_deserialize_taskset("100 250\n").is_err());
    }
}
