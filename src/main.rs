use sre::Pattern;

fn main() {
    let pattern = "a(b*|c)d";
    let text = "abbbbbbd";
    match Pattern::compile(pattern) {
        Ok(compiled) => {
            let verdict = if compiled.matches(text) {
                "matches"
            } else {
                "does not match"
            };
            println!("{text:?} {verdict} pattern {pattern:?}");
        }
        Err(err) => println!("Error: {err}"),
    }
}
