use std::path::PathBuf;

use super::common::{GenerationArgs, write_output};

pub struct ConstantsArgs {
    pub generation: GenerationArgs,
    pub output: Option<PathBuf>,
}

pub fn run(args: ConstantsArgs) {
    let artifacts = args.generation.run();
    write_output(args.output.as_deref(), &artifacts.constants);
}
