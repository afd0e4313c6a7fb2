use std::path::PathBuf;

use super::common::{GenerationArgs, write_output};

pub struct StubsArgs {
    pub generation: GenerationArgs,
    pub output: Option<PathBuf>,
}

pub fn run(args: StubsArgs) {
    let artifacts = args.generation.run();
    write_output(args.output.as_deref(), &artifacts.stubs);
}
