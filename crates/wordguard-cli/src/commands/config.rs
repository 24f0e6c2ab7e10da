use wordguard_core::error::WordguardError;
use wordguard_core::FileFormat;

use crate::commands::ConfigArgs;

pub fn show(args: &ConfigArgs) -> Result<(), WordguardError> {
    let config = args.resolve()?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

pub fn formats() {
    println!("Supported file types:\n");
    for format in FileFormat::ALL {
        println!("  .{:<6} {}", format.extension(), format);
    }
}
