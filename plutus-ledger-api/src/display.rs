use std::fmt::{Display, Formatter};

pub fn display_option<T>(opt: Option<T>) -> DisplayOption<T> {
    DisplayOption(opt)
}

pub struct DisplayOption<T>(Option<T>);

impl<T: Display> Display for DisplayOption<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            None => f.write_str("null"),
            Some(val) => val.fmt(f),
        }
    }
}
