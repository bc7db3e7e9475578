use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input = std::env::args().nth(1).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "usage: av_bv <av number | bvid>",
        )
    })?;

    let digits = input.trim_start_matches(['a', 'A', 'v', 'V']);
    match digits.parse::<u64>() {
        Ok(aid) => println!("{}", biliapi::av_to_bv(aid)),
        Err(_) => println!("av{}", biliapi::bv_to_av(&input)?),
    }

    Ok(())
}
