use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    fepslice::apps::run_plot_convergence(std::env::args().skip(1))
}
