//! Rendering targets for command reports.

/// Sink that a generation report writes its summary into.
///
/// Tests record the calls; the binary prints them.
pub trait Output {
    /// Heading above a group of paths.
    fn section(&mut self, name: &str);

    /// A labelled count, such as modules scanned.
    fn key_value(&mut self, key: &str, value: &str);

    /// An output file listed under a heading.
    fn list_item(&mut self, text: &str);

    /// An output file that did not exist before the run.
    fn added_item(&mut self, text: &str);

    /// Banner naming the file whose content follows in a dry run.
    fn divider(&mut self, label: &str);

    /// Text printed as is, like generated file content.
    fn preformatted(&mut self, text: &str);

    /// Empty line between groups.
    fn newline(&mut self);
}

/// Summary of a finished command.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Prints reports to stdout.
pub struct TerminalOutput;

impl Output for TerminalOutput {
    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn key_value(&mut self, key: &str, value: &str) {
        println!("{}: {}", key, value);
    }

    fn list_item(&mut self, text: &str) {
        println!("  - {}", text);
    }

    fn added_item(&mut self, text: &str) {
        println!("  + {}", text);
    }

    fn divider(&mut self, label: &str) {
        // A comment line keeps dry-run output valid Python.
        println!("# {}", label);
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }

    fn newline(&mut self) {
        println!();
    }
}
