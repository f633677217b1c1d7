use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    fepslice::apps::run_prepare_runs(std::env::args().skip(1))
}
