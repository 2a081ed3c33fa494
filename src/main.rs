use clap::{arg,crate_version,Command};
use std::fs::File;
use std::io::{BufReader,BufWriter};
use adaptive_huffman::adaptive;

const RCH: &str = "unreachable was reached";

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("{}",e);
        std::process::exit(1);
    }
}

fn run() -> Result<(),Box<dyn std::error::Error>>
{
    let long_help =
"Examples:
---------
Compress:      `adaptive-huffman compress -i my_file -o my_file.ah`
Decompress:    `adaptive-huffman decompress -i my_file.ah -o my_file`";

    let mut main_cmd = Command::new("adaptive-huffman")
        .about("Compress and decompress with an adaptive Huffman codec")
        .after_long_help(long_help)
        .version(crate_version!())
        .subcommand_required(true);
    main_cmd = main_cmd.subcommand(Command::new("compress")
        .arg(arg!(-i --input <PATH> "input path").required(true))
        .arg(arg!(-o --output <PATH> "output path").required(true))
        .about("compress a file"));

    main_cmd = main_cmd.subcommand(Command::new("decompress")
        .arg(arg!(-i --input <PATH> "input path").required(true))
        .arg(arg!(-o --output <PATH> "output path").required(true))
        .about("decompress a file"));

    let matches = main_cmd.get_matches();

    if let Some(cmd) = matches.subcommand_matches("compress") {
        let path_in = cmd.get_one::<String>("input").expect(RCH);
        let path_out = cmd.get_one::<String>("output").expect(RCH);
        let reader = BufReader::new(File::open(path_in)?);
        let writer = BufWriter::new(File::create(path_out)?);
        adaptive::compress(reader,writer)?;
    }

    if let Some(cmd) = matches.subcommand_matches("decompress") {
        let path_in = cmd.get_one::<String>("input").expect(RCH);
        let path_out = cmd.get_one::<String>("output").expect(RCH);
        let reader = BufReader::new(File::open(path_in)?);
        let writer = BufWriter::new(File::create(path_out)?);
        adaptive::decompress(reader,writer)?;
    }

    Ok(())
}
