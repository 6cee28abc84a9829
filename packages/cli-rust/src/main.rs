//! sswitch - List, update and add Host entries in your SSH config

fn main() {
    if let Err(err) = sswitch::run() {
        sswitch::output::show_error(&err);
        std::process::exit(1);
    }
}
