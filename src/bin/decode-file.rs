use std::path::PathBuf;

use clap::Parser;

use base64_enc_dec::file_base64::decode_file;
use base64_enc_dec::logger::setup_logger;

/// Decode a base64-encoded text file back to its original binary form.
#[derive(Parser)]
#[command(
    version,
    about,
    after_help = "Sample call: decode-file --input photo_encoded.txt --output photo_restored.png"
)]
struct Args {
    /// Path to the base64-encoded text file
    #[arg(long)]
    input: PathBuf,

    /// Path to save the decoded output file
    #[arg(long)]
    output: PathBuf,
}

fn main() {
    setup_logger();
    let args = Args::parse();

    match decode_file(&args.input, &args.output) {
        Ok(result) => {
            println!("Successfully decoded \"{}\"", result.input_file.display());
            println!("Output saved to: \"{}\"", result.output_file.display());
            println!("Encoded size: {} characters", result.input_size);
            println!("Decoded size: {} bytes", result.output_size);
        }
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
