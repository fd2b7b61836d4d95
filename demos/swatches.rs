//! Render the palette families to an HTML page of swatch tables.
//!
//! Run with `cargo run --example swatches` and open `swatches.html`.

use std::{io::{BufWriter, Write},
          fs::File,
          error::Error};
use rgb::RGB8;
use hcl_palettes::{color_to_hex,
                   qualitative_basic, qualitative,
                   sequential_basic, heat, terrain, single_hue,
                   diverging_basic, diverging};

type Err = Box<dyn Error>;

fn table_of_colors(fh: &mut impl Write, colors: &[RGB8],
                   comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px; border-spacing: 0px\"><tr>")?;
    for &c in colors {
        writeln!(fh, "  <td style=\"width: 60px; height: 30px; \
                      background-color: {}\"></td>",
                 color_to_hex(c))?;
    }
    writeln!(fh, "<td style=\"padding-left: 7px\">{comment}</td>\
                  </tr></table><br/>")?;
    Ok(())
}

fn main() -> Result<(), Err> {
    let mut fh = BufWriter::new(File::create("swatches.html")?);
    writeln!(fh, "<html>\n<body>")?;

    writeln!(fh, "<h3>Qualitative</h3>")?;
    for n in [3, 5, 8] {
        table_of_colors(&mut fh, &qualitative_basic(n)?,
                        &format!("qualitative_basic({n})"))?;
    }
    table_of_colors(&mut fh, &qualitative(6, (0., 300.), 80., 35.)?,
                    "qualitative(6, (0, 300), 80, 35), pastel")?;

    writeln!(fh, "<h3>Sequential</h3>")?;
    table_of_colors(&mut fh, &sequential_basic(12)?, "sequential_basic(12)")?;
    table_of_colors(&mut fh, &heat(12)?, "heat(12)")?;
    table_of_colors(&mut fh, &terrain(12)?, "terrain(12)")?;
    table_of_colors(&mut fh, &single_hue(12, 135.)?, "single_hue(12, 135)")?;

    writeln!(fh, "<h3>Diverging</h3>")?;
    table_of_colors(&mut fh, &diverging_basic(7)?, "diverging_basic(7)")?;
    table_of_colors(&mut fh, &diverging(11, (130., 43.), 100., (70., 90.), (1., 1.))?,
                    "diverging(11, (130, 43), 100, (70, 90), (1, 1))")?;

    writeln!(fh, "</body>\n</html>")?;
    Ok(())
}
