use std::io;

use intbytes::driver::run;

fn main() -> eyre::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(stdin.lock(), stdout.lock())
}
