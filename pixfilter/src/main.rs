use std::process::ExitCode;

fn main() -> ExitCode {
    pixfilter::init_logger();

    match pixfilter::run(std::env::args_os()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
