pub mod event;
pub mod location;
pub mod participant;
pub mod user;

pub use event::{CreateEventInput, Event, UpdateEventInput};
pub use location::{CreateLocationInput, Location, UpdateLocationInput};
pub use participant::{CreateParticipantInput, Participant, UpdateParticipantInput};
pub use user::{CreateUserInput, UpdateUserInput, User};
