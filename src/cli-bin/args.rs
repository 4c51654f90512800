use edf_rt_core::common::taskset_serde::TasksetFileType;

const DEFAULT_AFTER_HELP: &str = "Refer to the crate's documentation for further help";

pub mod prelude {
    pub use super::{Args, Command, SimulateArgs, TaskParamsArgs, TasksetArgs};
}

#[derive(clap::Parser, Debug)]
#[command(about, long_about = None, after_help = DEFAULT_AFTER_HELP)]
pub struct Args {
    /// Quiet mode / exit code as command result.
    ///
    /// When enabled, a zero exit code means the command's subject (the
    /// candidate, or the simulated set) is schedulable, a one means it is
    /// not, any other code means an error occurred.
    #[arg(short = 'q', default_value = "false", action = clap::ArgAction::SetTrue)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Test whether a candidate task may join an existing task set
    TestAdmission {
        #[command(flatten)]
        taskset: TasksetArgs,
        #[command(flatten)]
        candidate: TaskParamsArgs,
        /// Scheduler configuration file (JSON), overriding the compiled-in
        /// defaults
        #[arg(long = "config", value_name = "FILE")]
        config_file: Option<String>,
    },
    /// Run a tick-driven schedule trace over a task set and report
    /// context-switch requests and deadline misses
    Simulate(SimulateArgs),
}

#[derive(clap::Args, Debug)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub taskset: TasksetArgs,

    /// Number of ticks to simulate
    #[arg(long, default_value = "2000")]
    pub ticks: u32,

    /// Scheduler configuration file (JSON), overriding the compiled-in
    /// defaults
    #[arg(long = "config", value_name = "FILE")]
    pub config_file: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct TasksetArgs {
    /// Taskset data file
    #[arg(short = 'i', value_name = "TASKSET FILE")]
    pub taskset_file: String,

    /// Taskset file type
    #[arg(value_enum, short = 'f', long = "format", value_name = "FORMAT", default_value = "auto")]
    pub taskset_file_ty: TasksetFileType,
}

#[derive(clap::Args, Debug)]
pub struct TaskParamsArgs {
    /// Candidate worst-case execution time, in ticks
    #[arg(long = "wcet", value_name = "C")]
    pub wcet: u32,

    /// Candidate relative deadline, in ticks
    #[arg(long = "deadline", value_name = "D")]
    pub deadline: u32,

    /// Candidate period, in ticks
    #[arg(long = "period", value_name = "T")]
    pub period: u32,
}
