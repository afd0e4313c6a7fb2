use std::path::PathBuf;

use tlbgen_compiler::{Library, report};

use super::common::{fail, load_snapshot};

pub struct EnumsArgs {
    pub snapshot: PathBuf,
}

pub fn run(args: EnumsArgs) {
    let host = load_snapshot(&args.snapshot).unwrap_or_else(|e| fail(&e));
    let library = Library::extract(&host).unwrap_or_else(|e| fail(&e));

    println!(
        "Found {} constants in {} enums",
        library.constant_count(),
        library.enums.len()
    );
    println!();
    print!("{}", report::enum_listing(&library));
}
