pub mod paging;
pub mod params;

pub use crate::domain::model::Collection;
pub use crate::domain::ports::{ConfigProvider, Credentials, PageSource};
pub use crate::utils::error::Result;
pub use paging::fetch_all;
pub use params::{
    DagRunFilter, DateRange, ListOrder, LogOptions, Pagination, QueryParams, TaskInstanceFilter,
    UpdateMask,
};
