// This is the Lambda bootstrap entry point for the reminder function

use lambda_runtime::{Error, run, service_fn};

#[tokio::main]
async fn main() -> Result<(), Error> {
    hb_reminder::setup_logging();

    run(service_fn(hb_reminder::reminder::handler)).await
}
