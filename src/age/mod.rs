// Domain age — trait-based abstraction for swappable lookup providers.
//
// The DomainAgeProvider trait defines the interface. StaticAgeTable serves
// deterministic ages for tests and offline runs; RdapAgeProvider queries a
// public registry endpoint. Scoring treats any provider failure as "age
// unknown" and applies the default.

pub mod rdap;
pub mod table;
pub mod traits;
