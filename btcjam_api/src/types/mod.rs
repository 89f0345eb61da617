mod listing;
pub use self::listing::{Listing, ListingData, ListingID, User};

mod profile;
pub use self::profile::Profile;
