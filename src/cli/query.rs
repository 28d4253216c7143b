use std::{error::Error, io::Read};

use confdrift::{
    format::{self, Format},
    resolve::ValueExt,
    value::Value,
};

use crate::cli::{GetArgs, Outcome, load_document};

pub fn handle_query_command(args: GetArgs) -> Result<Outcome, Box<dyn Error>> {
    let doc = if let Some(file_path) = &args.file {
        load_document(file_path, args.format, false)?.unwrap_or_default()
    } else {
        read_from_stdin(args.format.unwrap_or(Format::Yaml))?
    };

    let value = doc.get_value_at(&args.path)?;
    println!("{value}");
    Ok(Outcome::Clean)
}

fn read_from_stdin(format: Format) -> Result<Value, Box<dyn Error>> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(format::parse_str(&buffer, format)?)
}
