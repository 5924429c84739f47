mod loader;
mod model;

pub use loader::{
    ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, LoadResult, RealFileSystem,
};
pub use model::{
    ALL_CATEGORIES, AxisConfig, BandConfig, ChartConfig, ColumnsConfig, Config, DataConfig,
    ExclusionConfig, OutputConfig, SeriesConfig, SeriesStyle, YearRange,
};
