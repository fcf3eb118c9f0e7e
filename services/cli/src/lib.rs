mod cli;
mod demo;
mod output;
mod rate;

use ratings::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
