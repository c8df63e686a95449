use std::path::PathBuf;

use clap::Parser;

use base64_enc_dec::file_base64::encode_file;
use base64_enc_dec::logger::setup_logger;

/// Base64 encode a file and save the encoded output to a text file.
#[derive(Parser)]
#[command(
    version,
    about,
    after_help = "Sample call: encode-file --input photo.png --output photo_encoded.txt"
)]
struct Args {
    /// Path to the file to encode
    #[arg(long)]
    input: PathBuf,

    /// Path for the output encoded text file. Defaults to
    /// <basename>_encoded.txt in the same directory as the input.
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() {
    setup_logger();
    let args = Args::parse();

    match encode_file(&args.input, args.output.as_deref()) {
        Ok(result) => {
            println!("Successfully encoded \"{}\"", result.input_file.display());
            println!("Output saved to: \"{}\"", result.output_file.display());
            println!("Original size: {} bytes", result.input_size);
            println!("Encoded size: {} characters", result.output_size);
        }
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
