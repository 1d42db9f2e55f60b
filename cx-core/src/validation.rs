use thiserror::Error;

// Every problem found in a spec; the messages are joined into the admission denial and the status
// condition message.
#[derive(Clone, Debug, Default, Error, PartialEq)]
#[error("{}", .messages.join("; "))]
pub struct ValidationError {
    pub messages: Vec<String>,
}

pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

#[derive(Debug, Default)]
pub struct Validator {
    messages: Vec<String>,
}

fn join_names(path: &str, fields: &[(&str, bool)]) -> String {
    let names: Vec<_> = fields.iter().map(|(name, _)| *name).collect();
    let joined = match names.split_last() {
        Some((last, [])) => last.to_string(),
        Some((last, rest)) => format!("{} or {last}", rest.join(", ")),
        None => String::new(),
    };
    if path.is_empty() { joined } else { format!("{path}: {joined}") }
}

impl Validator {
    pub fn new() -> Validator {
        Default::default()
    }

    pub fn exactly_one(&mut self, path: &str, fields: &[(&str, bool)]) -> &mut Self {
        let count = fields.iter().filter(|(_, set)| *set).count();
        if count != 1 {
            let names = join_names("", fields);
            self.push(path, format!("exactly one of {names} must be set"));
        }
        self
    }

    pub fn at_most_one(&mut self, path: &str, fields: &[(&str, bool)]) -> &mut Self {
        let count = fields.iter().filter(|(_, set)| *set).count();
        if count > 1 {
            let names = join_names("", fields);
            self.push(path, format!("at most one of {names} may be set"));
        }
        self
    }

    pub fn check(&mut self, path: &str, cond: bool, msg: &str) -> &mut Self {
        if !cond {
            self.push(path, msg.into());
        }
        self
    }

    pub fn merge(&mut self, res: Result<(), ValidationError>) -> &mut Self {
        if let Err(e) = res {
            self.messages.extend(e.messages);
        }
        self
    }

    pub fn finish(&mut self) -> Result<(), ValidationError> {
        if self.messages.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { messages: std::mem::take(&mut self.messages) })
        }
    }

    fn push(&mut self, path: &str, msg: String) {
        if path.is_empty() {
            self.messages.push(msg);
        } else {
            self.messages.push(format!("{path}: {msg}"));
        }
    }
}
