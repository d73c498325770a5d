pub mod code;
pub mod error;
pub mod structures;
pub mod utils;

pub use code::analysis::{AnalysisConfig, Analyzer, BatchReport, GeneratorOutcome, GeneratorReport};
pub use code::bounds::{bch, ext_bch, tzeng, Bound, Rectangle, Run, BOUND_FLOOR};
pub use code::generator::{find_generators, parse_generator, Generator};
pub use code::params::CodeParams;
pub use code::roots::{find_roots, RootSet};
pub use code::weight::{search_min_weight, MinWeight, WeightLimits, WeightSearch};
pub use error::{BoundError, BoundResult, ConfigurationError, ConsistencyError};
pub use structures::field_map::FieldMap;
pub use structures::gf2n;
pub use structures::gf2n::{BinaryField, Gf2n, PrimitiveTable};
pub use structures::poly::Poly;
pub use utils::{extension_degree, gcd, log2_exact};
