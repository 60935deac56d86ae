use clap::Parser;
use payup_application::{ExpenseForm, FormError, MAX_PARTICIPANTS, SheetError, SinkError};
use payup_i18n as i18n;
use std::{
    ffi::OsString,
    io::{self, BufRead, Write},
    path::PathBuf,
};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Sheet(#[from] SheetError),
    #[error(transparent)]
    Sink(#[from] SinkError),
    #[error(transparent)]
    Form(#[from] FormError),
    #[error("Failed to read input: {0}")]
    Input(#[from] io::Error),
}

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "payup", version, about = i18n::APP_TITLE)]
struct Args {
    #[arg(value_name = "FILE", help = i18n::SHEET_ARG_HELP)]
    sheet: Option<PathBuf>,

    #[arg(short, long, help = i18n::COPY_FLAG_HELP)]
    copy: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Interactive,
    Sheet(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub mode: Mode,
    pub copy_only: bool,
}

/// Parse the full argument list, binary name first.
pub fn parse_args<I, T>(args: I) -> Result<Invocation, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = Args::try_parse_from(args)?;
    let mode = match args.sheet {
        Some(path) => Mode::Sheet(path),
        None => Mode::Interactive,
    };
    Ok(Invocation {
        mode,
        copy_only: args.copy,
    })
}

/// Ask for the participant count, then a name and amount per slot.
///
/// End of input leaves the remaining slots blank.
pub fn prompt_form<R, W>(
    input: &mut R,
    output: &mut W,
    default_people: u32,
) -> Result<ExpenseForm, CliError>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", i18n::APP_TITLE)?;

    let label = format!("{} [{default_people}]", i18n::PROMPT_PEOPLE);
    let people = match prompt(input, output, &label)? {
        Some(answer) if !answer.trim().is_empty() => match answer.trim().parse::<u32>() {
            Ok(people) if people <= MAX_PARTICIPANTS => people,
            _ => {
                tracing::warn!(
                    answer = %answer.trim(),
                    max = MAX_PARTICIPANTS,
                    "Unusable participant count; using default"
                );
                default_people
            }
        },
        _ => default_people,
    };

    let mut form = ExpenseForm::new(people);
    for index in 0..form.slots().len() {
        writeln!(output, "{}", i18n::participant_heading(index + 1))?;
        let Some(name) = prompt(input, output, i18n::PROMPT_NAME)? else {
            break;
        };
        form.set_name(index, &name)?;
        let Some(amount) = prompt(input, output, i18n::PROMPT_AMOUNT)? else {
            break;
        };
        form.set_amount(index, &amount)?;
    }
    writeln!(output)?;

    Ok(form)
}

fn prompt<R, W>(input: &mut R, output: &mut W, label: &str) -> io::Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{label}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
