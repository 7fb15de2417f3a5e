use wordcheck_types::Verdict;

/// A resolved definition as it is displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionView {
    pub text: String,
    pub attribution: Option<String>,
    pub source_url: Option<String>,
}

pub fn verdict_line(word: &str, verdict: Verdict) -> String {
    let decision = match verdict {
        Verdict::Good => "GOOD!",
        Verdict::Bad => "BAD :(",
    };
    format!("{word} is {decision}")
}

pub fn show_verdict(word: &str, verdict: Verdict) {
    println!("{}", verdict_line(word, verdict));
}

pub fn show_searching() {
    println!("Searching for definition...");
}

pub fn show_definition(view: &DefinitionView) {
    println!("Definition");
    println!("{}", view.text);
    if let Some(attribution) = &view.attribution {
        println!("{attribution}");
    }
    if let Some(url) = &view.source_url {
        println!("{url}");
    }
}

pub fn about_message(word_list: &str) -> String {
    format!(
        "Type a word to check whether it is allowed, :about for this message, :quit to leave.\n\
         This app uses the {} word list.",
        word_list.to_uppercase()
    )
}
