use rand::Rng;

/// Random quote generator; nothing is shown until the first request
#[derive(Debug, Clone)]
pub struct QuoteGenerator {
    quotes: Vec<String>,
    current: Option<usize>,
}

impl QuoteGenerator {
    pub fn new(quotes: Vec<String>) -> Self {
        Self {
            quotes,
            current: None,
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.current.and_then(|i| self.quotes.get(i)).map(String::as_str)
    }

    /// Show a random quote (repeats allowed)
    pub fn next_quote(&mut self) {
        let mut rng = rand::thread_rng();
        self.next_quote_with(&mut rng);
    }

    pub fn next_quote_with<R: Rng>(&mut self, rng: &mut R) {
        if self.quotes.is_empty() {
            return;
        }
        self.current = Some(rng.gen_range(0..self.quotes.len()));
    }
}
