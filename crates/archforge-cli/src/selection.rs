//! Interactive architecture selection.
//!
//! Selection is a chain of strategies tried in order. A strategy that is
//! unavailable is skipped; one that fails hands over to the next. Only an
//! explicit abort by the user stops the chain.
//!
//! 1. [`FuzzySelector`]: in-process fuzzy finder (`interactive` feature, TTY only)
//! 2. [`ExternalFzfSelector`]: the `fzf` binary, if it is on `PATH`
//! 3. [`NumericMenuSelector`]: numbered menu, works on any stdin

use std::io::{self, BufRead, IsTerminal, StdinLock, Stdout, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use archforge_core::domain::ArchitectureName;
use tracing::{debug, warn};

use crate::error::{CliError, CliResult, IntoCli};

/// One way of asking the user for an architecture.
pub trait ArchitectureSelector {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Whether this strategy can run in the current environment.
    fn is_available(&self) -> bool;

    /// Ask for one of `options`. `preferred` is highlighted or used as the
    /// default where the strategy supports it.
    fn select(
        &mut self,
        options: &[ArchitectureName],
        preferred: Option<ArchitectureName>,
    ) -> CliResult<ArchitectureName>;
}

/// Menu line for an architecture: name padded to a column, then description.
pub fn label(architecture: ArchitectureName) -> String {
    format!("{:<10} {}", architecture.as_str(), architecture.description())
}

/// Recover the architecture from a line produced by [`label`].
fn parse_label(line: &str, options: &[ArchitectureName]) -> CliResult<ArchitectureName> {
    let name = line.split_whitespace().next().unwrap_or_default();
    options
        .iter()
        .copied()
        .find(|a| a.as_str() == name)
        .ok_or_else(|| CliError::SelectionFailed {
            reason: format!("unexpected selection '{}'", line.trim()),
        })
}

// ── Chain ─────────────────────────────────────────────────────────────────────

/// Tries each selector in turn until one produces an answer.
pub struct SelectorChain {
    selectors: Vec<Box<dyn ArchitectureSelector>>,
}

impl SelectorChain {
    pub fn new(selectors: Vec<Box<dyn ArchitectureSelector>>) -> Self {
        Self { selectors }
    }

    /// The production chain over stdin/stdout.
    ///
    /// With `fuzzy` off only the numbered menu is used. The chain holds the
    /// stdin lock, so drop it before prompting for anything else.
    pub fn standard(fuzzy: bool) -> Self {
        let mut selectors: Vec<Box<dyn ArchitectureSelector>> = Vec::new();
        #[cfg(feature = "interactive")]
        selectors.push(Box::new(FuzzySelector::new(fuzzy)));
        selectors.push(Box::new(ExternalFzfSelector::detect(fuzzy)));
        selectors.push(Box::new(NumericMenuSelector::stdio()));
        Self::new(selectors)
    }

    pub fn select(
        &mut self,
        options: &[ArchitectureName],
        preferred: Option<ArchitectureName>,
    ) -> CliResult<ArchitectureName> {
        let mut last_error = None;

        for selector in &mut self.selectors {
            if !selector.is_available() {
                debug!(selector = selector.name(), "Selector unavailable, skipping");
                continue;
            }

            match selector.select(options, preferred) {
                Ok(choice) => {
                    debug!(selector = selector.name(), architecture = %choice, "Architecture selected");
                    return Ok(choice);
                }
                Err(CliError::Cancelled) => return Err(CliError::Cancelled),
                Err(e) => {
                    warn!(selector = selector.name(), error = %e, "Selector failed, trying the next one");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| CliError::SelectionFailed {
            reason: "no selection method is available".into(),
        }))
    }
}

// ── In-process fuzzy finder ───────────────────────────────────────────────────

/// `dialoguer` fuzzy select, drawn on stderr.
#[cfg(feature = "interactive")]
pub struct FuzzySelector {
    enabled: bool,
}

#[cfg(feature = "interactive")]
impl FuzzySelector {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

#[cfg(feature = "interactive")]
impl ArchitectureSelector for FuzzySelector {
    fn name(&self) -> &'static str {
        "fuzzy"
    }

    fn is_available(&self) -> bool {
        self.enabled && console::Term::stderr().is_term() && io::stdin().is_terminal()
    }

    fn select(
        &mut self,
        options: &[ArchitectureName],
        preferred: Option<ArchitectureName>,
    ) -> CliResult<ArchitectureName> {
        use dialoguer::{FuzzySelect, theme::ColorfulTheme};

        let labels: Vec<String> = options.iter().copied().map(label).collect();
        let default = preferred
            .and_then(|p| options.iter().position(|a| *a == p))
            .unwrap_or(0);

        let picked = FuzzySelect::with_theme(&ColorfulTheme::default())
            .with_prompt("Select architecture")
            .items(&labels)
            .default(default)
            .interact_opt()
            .map_err(|e| CliError::SelectionFailed {
                reason: e.to_string(),
            })?;

        picked.map(|i| options[i]).ok_or(CliError::Cancelled)
    }
}

// ── External fzf ──────────────────────────────────────────────────────────────

/// Pipes the menu through the `fzf` binary.
pub struct ExternalFzfSelector {
    program: Option<PathBuf>,
}

impl ExternalFzfSelector {
    /// Look for `fzf` on `PATH` when `enabled` and stdout is a terminal.
    pub fn detect(enabled: bool) -> Self {
        let program = if enabled && io::stdout().is_terminal() {
            which::which("fzf").ok()
        } else {
            None
        };
        Self { program }
    }

    #[cfg(test)]
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: Some(program.into()),
        }
    }
}

impl ArchitectureSelector for ExternalFzfSelector {
    fn name(&self) -> &'static str {
        "fzf"
    }

    fn is_available(&self) -> bool {
        self.program.is_some()
    }

    fn select(
        &mut self,
        options: &[ArchitectureName],
        _preferred: Option<ArchitectureName>,
    ) -> CliResult<ArchitectureName> {
        let program = self.program.as_deref().ok_or_else(|| CliError::SelectionFailed {
            reason: "fzf is not installed".into(),
        })?;

        let mut child = Command::new(program)
            .arg("--ansi")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .with_cli_context(|| format!("failed to start {}", program.display()))?;

        if let Some(mut stdin) = child.stdin.take() {
            for architecture in options {
                writeln!(stdin, "{}", label(*architecture))
                    .with_cli_context(|| "failed to send options to fzf")?;
            }
        }

        let output = child
            .wait_with_output()
            .with_cli_context(|| "failed to read fzf output")?;
        if !output.status.success() {
            return Err(CliError::SelectionFailed {
                reason: format!("fzf exited with {}", output.status),
            });
        }

        parse_label(&String::from_utf8_lossy(&output.stdout), options)
    }
}

// ── Numbered menu ─────────────────────────────────────────────────────────────

/// Prints a numbered list and reads a number, re-asking until it is valid.
pub struct NumericMenuSelector<R, W> {
    input: R,
    output: W,
}

impl NumericMenuSelector<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> NumericMenuSelector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn run(
        &mut self,
        options: &[ArchitectureName],
        preferred: Option<ArchitectureName>,
    ) -> io::Result<Option<ArchitectureName>> {
        let default = preferred.and_then(|p| options.iter().position(|a| *a == p));

        writeln!(self.output)?;
        for (i, architecture) in options.iter().enumerate() {
            writeln!(self.output, "{:2}) {}", i + 1, label(*architecture))?;
        }
        match default {
            Some(i) => write!(self.output, "Select architecture by number [{}]: ", i + 1)?,
            None => write!(self.output, "Select architecture by number: ")?,
        }
        self.output.flush()?;

        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            let answer = line.trim();
            if answer.is_empty() {
                if let Some(i) = default {
                    return Ok(Some(options[i]));
                }
                write!(self.output, "Please enter a number: ")?;
            } else {
                match answer.parse::<usize>() {
                    Ok(n) if (1..=options.len()).contains(&n) => return Ok(Some(options[n - 1])),
                    _ => write!(self.output, "Invalid selection. Enter 1-{}: ", options.len())?,
                }
            }
            self.output.flush()?;
        }
    }
}

impl<R: BufRead, W: Write> ArchitectureSelector for NumericMenuSelector<R, W> {
    fn name(&self) -> &'static str {
        "numeric"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn select(
        &mut self,
        options: &[ArchitectureName],
        preferred: Option<ArchitectureName>,
    ) -> CliResult<ArchitectureName> {
        if options.is_empty() {
            return Err(CliError::SelectionFailed {
                reason: "nothing to choose from".into(),
            });
        }

        self.run(options, preferred)
            .with_cli_context(|| "failed to read selection")?
            .ok_or_else(|| CliError::SelectionFailed {
                reason: "input ended before a selection was made".into(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const ALL: [ArchitectureName; 11] = ArchitectureName::ALL;

    fn menu(input: &str) -> NumericMenuSelector<Cursor<Vec<u8>>, Vec<u8>> {
        NumericMenuSelector::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    struct Scripted {
        available: bool,
        answer: fn() -> CliResult<ArchitectureName>,
    }

    impl ArchitectureSelector for Scripted {
        fn name(&self) -> &'static str {
            "scripted"
        }
        fn is_available(&self) -> bool {
            self.available
        }
        fn select(
            &mut self,
            _options: &[ArchitectureName],
            _preferred: Option<ArchitectureName>,
        ) -> CliResult<ArchitectureName> {
            (self.answer)()
        }
    }

    fn boxed(selector: impl ArchitectureSelector + 'static) -> Box<dyn ArchitectureSelector> {
        Box::new(selector)
    }

    fn failing() -> CliResult<ArchitectureName> {
        Err(CliError::SelectionFailed {
            reason: "broken".into(),
        })
    }

    // ── numbered menu ─────────────────────────────────────────────────────

    #[test]
    fn menu_lists_every_option_and_reads_a_number() {
        let mut selector = menu("3\n");
        assert_eq!(selector.select(&ALL, None).unwrap(), ArchitectureName::Clean);

        let shown = String::from_utf8(selector.output).unwrap();
        assert!(shown.contains(" 1) flat       Simple flat structure"));
        assert!(shown.contains("11) layered    Layered architecture"));
        assert!(shown.ends_with("Select architecture by number: "));
    }

    #[test]
    fn menu_reprompts_until_valid() {
        let mut selector = menu("\nabc\n0\n12\n11\n");
        assert_eq!(selector.select(&ALL, None).unwrap(), ArchitectureName::Layered);

        let shown = String::from_utf8(selector.output).unwrap();
        assert_eq!(shown.matches("Please enter a number: ").count(), 1);
        assert_eq!(shown.matches("Invalid selection. Enter 1-11: ").count(), 3);
    }

    #[test]
    fn menu_fails_when_input_ends() {
        let err = menu("x\n").select(&ALL, None).unwrap_err();
        assert!(matches!(err, CliError::SelectionFailed { .. }));
    }

    #[test]
    fn menu_empty_answer_takes_preferred() {
        let mut selector = menu("\n");
        let picked = selector
            .select(&ALL, Some(ArchitectureName::Hexagonal))
            .unwrap();
        assert_eq!(picked, ArchitectureName::Hexagonal);
        assert!(String::from_utf8(selector.output).unwrap().contains("[5]: "));
    }

    // ── chain ─────────────────────────────────────────────────────────────

    #[test]
    fn chain_falls_through_failures_and_skips_unavailable() {
        let mut chain = SelectorChain::new(vec![
            boxed(Scripted {
                available: false,
                answer: || Ok(ArchitectureName::Flat),
            }),
            boxed(Scripted {
                available: true,
                answer: failing,
            }),
            boxed(menu("2\n")),
        ]);
        assert_eq!(chain.select(&ALL, None).unwrap(), ArchitectureName::Ddd);
    }

    #[test]
    fn chain_stops_on_cancel() {
        let mut chain = SelectorChain::new(vec![
            boxed(Scripted {
                available: true,
                answer: || Err(CliError::Cancelled),
            }),
            boxed(menu("1\n")),
        ]);
        assert!(matches!(chain.select(&ALL, None), Err(CliError::Cancelled)));
    }

    #[test]
    fn chain_reports_last_failure() {
        let mut chain = SelectorChain::new(vec![boxed(Scripted {
            available: true,
            answer: failing,
        })]);
        let err = chain.select(&ALL, None).unwrap_err();
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn empty_chain_fails() {
        let err = SelectorChain::new(Vec::new()).select(&ALL, None).unwrap_err();
        assert!(matches!(err, CliError::SelectionFailed { .. }));
    }

    // ── fzf helpers ───────────────────────────────────────────────────────

    #[test]
    fn labels_round_trip_through_parse() {
        for architecture in ALL {
            assert_eq!(parse_label(&label(architecture), &ALL).unwrap(), architecture);
        }
        assert!(parse_label("mvc   Model View Controller", &ALL).is_err());
        assert!(parse_label("", &ALL).is_err());
    }

    #[test]
    fn fzf_is_unavailable_when_disabled() {
        assert!(!ExternalFzfSelector::detect(false).is_available());
        assert!(ExternalFzfSelector::with_program("/usr/bin/fzf").is_available());
    }
}
