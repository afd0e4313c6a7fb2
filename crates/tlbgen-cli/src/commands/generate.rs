use std::fs;
use std::path::PathBuf;

use super::common::{GenerationArgs, fail, write_file};

pub struct GenerateArgs {
    pub generation: GenerationArgs,
    pub out_dir: PathBuf,
    pub stub_name: String,
}

pub fn run(args: GenerateArgs) {
    let artifacts = args.generation.run();

    if let Err(e) = fs::create_dir_all(&args.out_dir) {
        fail(&format!("failed to create {}: {}", args.out_dir.display(), e));
    }

    // The stubs import from the constants module, so both share its name
    let module = args.generation.config().constants_module_name().to_string();
    write_file(&args.out_dir.join(format!("{module}.py")), &artifacts.constants);
    write_file(
        &args.out_dir.join(format!("{}.pyi", args.stub_name)),
        &artifacts.stubs,
    );
}
