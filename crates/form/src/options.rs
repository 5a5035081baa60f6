//! Option collection for new select fields.
use tracing::debug;

use crate::field::SelectOption;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogResponse {
    Submitted(Vec<String>),
    Cancelled,
}

/// Secondary input that asks the user for the option texts of a select.
pub trait OptionsDialog {
    fn prompt(&mut self) -> DialogResponse;
}

impl<F> OptionsDialog for F
where
    F: FnMut() -> DialogResponse,
{
    fn prompt(&mut self) -> DialogResponse {
        self()
    }
}

/// Prompt until at least one non-blank option text is given. Cancelling
/// re-prompts instead of giving up, so the caller always gets a valid,
/// non-empty option list.
pub fn collect_options<D: OptionsDialog + ?Sized>(dialog: &mut D) -> Vec<SelectOption> {
    let mut attempts = 0usize;
    loop {
        attempts += 1;
        let texts = match dialog.prompt() {
            DialogResponse::Submitted(texts) => texts,
            DialogResponse::Cancelled => Vec::new(),
        };

        let options: Vec<SelectOption> = texts
            .iter()
            .map(|text| text.trim())
            .filter(|text| !text.is_empty())
            .map(SelectOption::from_text)
            .collect();

        if !options.is_empty() {
            return options;
        }
        debug!(attempts, "no options given, prompting again");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reprompts_until_options_given() {
        let mut replies = vec![
            DialogResponse::Submitted(vec!["Red".into(), "  Blue ".into(), " ".into()]),
            DialogResponse::Submitted(vec!["   ".into()]),
            DialogResponse::Cancelled,
        ];
        let mut calls = 0;
        let mut dialog = || {
            calls += 1;
            replies.pop().unwrap()
        };

        let options = collect_options(&mut dialog);
        assert_eq!(calls, 3);
        assert_eq!(
            options,
            vec![SelectOption::from_text("Red"), SelectOption::from_text("Blue")]
        );
    }
}
