pub mod catalog;
pub mod hotel;
pub mod indices;
pub mod normalize;
pub mod room;
pub mod sink;

pub use catalog::{ServiceCatalog, ServiceEntry, ServiceKind};
pub use hotel::{hotel_from_row, HotelDocument, HotelRow};
pub use normalize::{clean_text, parse_date_range, parse_facility_list, ParseStatus};
pub use room::{room_from_row, RoomDocument, RoomRow};
pub use sink::{CollectionSink, IndexKey, IndexSpec, SinkError};
