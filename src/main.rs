use std::env;
use std::io::{self, BufRead, Write};
use std::process;

use chrono::{Local, NaiveDate};

use taskmate::color;
use taskmate::command::{self, Command};
use taskmate::config::{self, Config};
use taskmate::storage::TaskFileStore;
use taskmate::task::{Task, TaskKind, TaskList};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const GOODBYE: &str = "Bye. Your tasks are saved.";

fn main() {
    let args: Vec<String> = env::args().collect();
    let cli = config::parse_args(args);

    if cli.help {
        print_help();
        return;
    }

    if cli.version {
        println!("taskmate {}", VERSION);
        return;
    }

    let config = Config::load(&cli);

    // The list is saved after every mutation, so an interrupt loses nothing.
    if let Err(e) = ctrlc::set_handler(|| {
        println!();
        println!("{}", GOODBYE);
        process::exit(130);
    }) {
        eprintln!("warning: could not register interrupt handler: {}", e);
    }

    if let Err(e) = run(&config) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn print_help() {
    println!(
        r#"taskmate - personal task-tracking assistant

USAGE:
    taskmate [OPTIONS]

OPTIONS:
    -h, --help           Show this help message
    -V, --version        Show version
    -f, --file <PATH>    Path to the task file (default: tasks.txt,
                         or the TASKMATE_FILE environment variable)

COMMANDS (interactive):
    list                           Show all tasks
    todo <desc>                    Add a plain to-do
    deadline <desc> /by <date>     Add a task due on <date> (YYYY-MM-DD)
    event <desc> /at <date>        Add an event on <date> (YYYY-MM-DD)
    done <n>                       Mark task <n> as done
    undone <n>                     Mark task <n> as not done
    delete <n>                     Delete task <n>
    find <keyword>                 Search task descriptions
    help                           Show the interactive commands
    bye                            Exit"#
    );
}

/// Run the interactive session: load, loop over stdin, save after each
/// mutation. Only startup failures are fatal; in-session errors are shown
/// and the loop continues.
fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let store = TaskFileStore::new(&config.data_file);
    let mut list = TaskList::new(store.load()?);

    greet(&list);

    let stdin = io::stdin();
    let mut input = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;

        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            // EOF behaves like `bye`
            println!();
            println!("{}", GOODBYE);
            return Ok(());
        }
        if input.trim().is_empty() {
            continue;
        }

        let cmd = match command::parse(&input) {
            Ok(cmd) => cmd,
            Err(e) => {
                println!("{}", color::error(&e.to_string()));
                continue;
            }
        };

        match execute(cmd, &mut list, &store) {
            Ok(Outcome::Continue) => {}
            Ok(Outcome::Quit) => {
                println!("{}", GOODBYE);
                return Ok(());
            }
            Err(msg) => println!("{}", color::error(&msg)),
        }
    }
}

/// What the loop should do after a command.
enum Outcome {
    Continue,
    Quit,
}

/// Execute one parsed command against the list, saving after mutations.
fn execute(cmd: Command, list: &mut TaskList, store: &TaskFileStore) -> Result<Outcome, String> {
    match cmd {
        Command::List => print_list(list),
        Command::Add(task) => {
            println!("Added: {}", render(&task, today()));
            list.add(task);
            save(list, store)?;
            println!("{} task(s) in the list.", color::number(list.len()));
        }
        Command::Done(n) => {
            let index = check_number(n, list)?;
            if let Some(task) = list.mark_done(index) {
                println!("Nice, marked as done:");
                println!("  {}", color::done(&task.to_string()));
            }
            save(list, store)?;
        }
        Command::Undone(n) => {
            let index = check_number(n, list)?;
            if let Some(task) = list.mark_undone(index) {
                println!("Back on the list:");
                println!("  {}", task);
            }
            save(list, store)?;
        }
        Command::Delete(n) => {
            let index = check_number(n, list)?;
            if let Some(task) = list.remove(index) {
                println!("Removed: {}", task);
            }
            save(list, store)?;
            println!("{} task(s) left.", color::number(list.len()));
        }
        Command::Find(keyword) => {
            let matches = list.find(&keyword);
            if matches.is_empty() {
                println!("No tasks matching {:?}.", keyword);
            } else {
                let today = today();
                for (index, task) in matches {
                    println!("{:>3}. {}", index + 1, render(task, today));
                }
            }
        }
        Command::Help => print_help(),
        Command::Bye => return Ok(Outcome::Quit),
    }
    Ok(Outcome::Continue)
}

fn greet(list: &TaskList) {
    println!("{}", color::label("taskmate"));
    println!("Today is {}.", color::info(&today().format("%Y-%m-%d").to_string()));
    if list.is_empty() {
        println!("No saved tasks. Type `help` to get started.");
    } else {
        println!(
            "Loaded {} task(s), {} pending.",
            color::number(list.len()),
            color::number(list.pending_count())
        );
    }
}

fn print_list(list: &TaskList) {
    if list.is_empty() {
        println!("Nothing here yet. Try `todo <description>`.");
        return;
    }
    let today = today();
    for (index, task) in list.tasks.iter().enumerate() {
        println!("{:>3}. {}", index + 1, render(task, today));
    }
    println!(
        "{} done, {} pending.",
        color::number(list.done_count()),
        color::number(list.pending_count())
    );
}

/// Render one task for the terminal: green when done, red when it is a
/// deadline already past its date.
fn render(task: &Task, today: NaiveDate) -> String {
    let line = task.to_string();
    if task.done {
        color::done(&line)
    } else if matches!(task.kind, TaskKind::Deadline(date) if date < today) {
        color::overdue(&line)
    } else {
        line
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn save(list: &TaskList, store: &TaskFileStore) -> Result<(), String> {
    store.save(&list.tasks).map_err(|e| e.to_string())
}

/// Convert a 1-based task number to a list index, or report a range error.
fn check_number(n: usize, list: &TaskList) -> Result<usize, String> {
    if n >= 1 && n <= list.len() {
        Ok(n - 1)
    } else if list.is_empty() {
        Err(format!("no task number {} (the list is empty)", n))
    } else {
        Err(format!("no task number {} (the list has {})", n, list.len()))
    }
}
