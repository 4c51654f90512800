use clap::Parser;

/// Generates a synthetic task set with a shared period and WCET, and a
/// relative deadline that increases linearly from task to task -- the
/// shape used by the 100-task admission-divergence scenario.
#[derive(Parser)]
struct Args {
    /// Number of tasks to generate
    #[arg(short = 'n', value_name = "COUNT", default_value = "10")]
    count: u32,

    /// Period shared by every generated task, in ticks
    #[arg(short = 'T', value_name = "PERIOD")]
    period: u32,

    /// Worst-case execution time shared by every generated task, in ticks
    #[arg(short = 'C', value_name = "WCET")]
    wcet: u32,

    /// Relative deadline of the first task, in ticks
    #[arg(long = "deadline-start", default_value = "0")]
    deadline_start: u32,

    /// Relative deadline increment per subsequent task, in ticks
    #[arg(long = "deadline-step", default_value = "0")]
    deadline_step: u32,
}

fn main() {
    let args = Args::parse();

    for index in 0..args.count {
        let deadline = (args.deadline_start + index * args.deadline_step)
            .clamp(args.wcet, args.period);

        println!("{} {} {}", args.wcet, deadline, args.period);
    }
}
