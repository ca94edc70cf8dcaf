use lambda_http::{tracing, Error};
use toukon_lambda::{event::local_test_event, handle, InvocationContext};

fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    let envelope = handle::<dyn InvocationContext>(&local_test_event(), None);

    println!("🔥 テスト結果:");
    println!("{}", serde_json::to_string_pretty(&envelope)?);

    Ok(())
}
