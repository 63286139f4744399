use pdf417_symbol::*;
use tracing_subscriber::EnvFilter;

const WHITE: &str = "\x1B[38;2;255;255;255m█";
const BLACK: &str = "\x1B[38;2;0;0;0m█";

fn display(bitmap: &Bitmap) {
    for y in 0..bitmap.height() {
        for x in 0..bitmap.width() {
            print!("{}", if bitmap.is_dark(x, y) { BLACK } else { WHITE });
        }
        println!();
    }
    println!("\x1B[0m");
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let text = std::env::args().nth(1).unwrap_or_else(|| "Hello, world from *rust* !".to_owned());
    let settings = Settings::default()
        .with_module_width(1)
        .with_module_height(2)
        .with_quiet_zone(2);

    let barcode = match Barcode::from_text(&text, &settings) {
        Err(Error::UnsupportedCharacter { .. }) => Barcode::new(Payload::Utf8(&text), &settings)?,
        other => other?,
    };

    display(barcode.bitmap());
    println!(
        "{} rows x {} columns, error correction level {}",
        barcode.rows(),
        barcode.data_columns(),
        barcode.correction_level()
    );
    Ok(())
}
