use std::io::{self, BufRead, Write};
use std::sync::Arc;

use log::{error, info};
use phoneword::{dictionary, Arg, Batch, Lookup, PhoneNumber, PhonewordErr};
use thread_pool::ThreadPool;

extern crate env_logger;

fn main() {
    env_logger::init();
    let arg = Arg::parse();
    if let Err(e) = run(&arg) {
        error!("{}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(arg: &Arg) -> phoneword::Result<()> {
    let (index, _) = dictionary::load_path(arg.get_dict_ref())?;
    let batch = Batch::new(Arc::new(index))
        .literal_groups(if arg.get_spell_country_code() { 0 } else { 1 })
        .limit(arg.get_limit());

    let lookups = match arg.get_numbers_ref().as_slice() {
        [] => {
            let stdin = io::stdin();
            let input = prompt(&mut stdin.lock(), &mut io::stdout())?;
            vec![batch.lookup(&input)]
        }
        [single] => vec![batch.lookup(single)],
        numbers => {
            let pool = ThreadPool::new(arg.get_workers().max(1))?;
            info!("looking up {} numbers on {} workers", numbers.len(), pool.size());
            let lookups = batch.run(numbers.to_vec(), &pool);
            pool.shutdown();
            lookups
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for lookup in &lookups {
        report(&mut out, lookup)?;
    }
    Ok(())
}

/// Asks until a well-formed number is entered.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> phoneword::Result<String> {
    loop {
        writeln!(out, "Please enter a phone number you'd like")?;
        writeln!(out, "to test. (1-###-###-####)")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(PhonewordErr::IOError("no phone number given".to_string()));
        }
        match PhoneNumber::parse(&line) {
            Ok(_) => return Ok(line.trim().to_string()),
            Err(_) => writeln!(out, "Incorrect input. Please try again.")?,
        }
    }
}

fn report<W: Write>(out: &mut W, lookup: &Lookup) -> io::Result<()> {
    let spellings = match &lookup.outcome {
        Ok(spellings) => spellings,
        Err(e) => return writeln!(out, "{}: {}", lookup.input, e),
    };
    if spellings.total == 0 {
        return writeln!(out, "no spelling found for {}", spellings.number);
    }
    for phrase in &spellings.phrases {
        let groups: Vec<String> = phrase.iter().map(|words| words.join("-")).collect();
        writeln!(out, "{}", groups.join("-"))?;
    }
    if spellings.phrases.len() < spellings.total {
        writeln!(
            out,
            "... {} more for {}",
            spellings.total - spellings.phrases.len(),
            spellings.number
        )?;
    }
    Ok(())
}
