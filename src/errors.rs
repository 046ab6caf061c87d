error_chain! {
    errors {
        InvalidArgument(msg: String) {
            description("invalid argument")
            display("invalid argument: {}", msg)
        }
    }
}

// Fails unless every length in `lens` equals the first one and is nonzero.
pub fn check_lengths(lens: &[(&str, usize)]) -> Result<usize> {
    let (first_name, n) = match lens.first() {
        Some(&first) => first,
        None => bail!(ErrorKind::InvalidArgument("no input sequences".to_string())),
    };
    if n == 0 {
        bail!(ErrorKind::InvalidArgument(format!("{} is empty", first_name)));
    }
    for &(name, len) in &lens[1..] {
        if len != n {
            bail!(ErrorKind::InvalidArgument(format!(
                "length of {} ({}) does not match length of {} ({})",
                name, len, first_name, n
            )));
        }
    }
    Ok(n)
}
