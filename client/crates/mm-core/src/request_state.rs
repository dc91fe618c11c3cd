//! Per-view request lifecycle: `idle -> loading -> success | failure`.

/// State of the one outstanding request a view cares about.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState<T> {
    Idle,
    Loading,
    Success(T),
    /// User-facing failure message.
    Failure(String),
}

impl<T> RequestState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failure(message) => Some(message),
            _ => None,
        }
    }
}

/// Proof that a request was started by a [`ViewState`].
///
/// Only the ticket of the most recent request may complete it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    generation: u64,
}

/// Request state owned by a view, guarded against late completions.
///
/// Once the view is left, or a newer request has been started, completions of
/// older requests are dropped instead of writing into state nobody looks at.
#[derive(Debug)]
pub struct ViewState<T> {
    state: RequestState<T>,
    generation: u64,
    active: bool,
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ViewState<T> {
    pub fn new() -> Self {
        Self {
            state: RequestState::Idle,
            generation: 0,
            active: true,
        }
    }

    /// Moves to `Loading` and returns the ticket for the new request.
    pub fn begin(&mut self) -> RequestTicket {
        self.generation += 1;
        self.state = RequestState::Loading;
        RequestTicket {
            generation: self.generation,
        }
    }

    /// Applies the result of the request identified by `ticket`.
    ///
    /// Returns false, leaving the state untouched, when the view was left or
    /// the ticket is stale.
    pub fn complete(&mut self, ticket: RequestTicket, result: Result<T, String>) -> bool {
        if !self.active || ticket.generation != self.generation {
            return false;
        }

        self.state = match result {
            Ok(data) => RequestState::Success(data),
            Err(message) => RequestState::Failure(message),
        };
        true
    }

    /// Marks the view as no longer displayed.
    pub fn leave(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn state(&self) -> &RequestState<T> {
        &self.state
    }

    pub fn data(&self) -> Option<&T> {
        self.state.data()
    }

    pub fn data_mut(&mut self) -> Option<&mut T> {
        match &mut self.state {
            RequestState::Success(data) => Some(data),
            _ => None,
        }
    }
}
