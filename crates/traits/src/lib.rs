pub mod resolver;
pub mod transport;

pub use resolver::{
    ComponentDescriptor, ComponentInfo, ComponentRegistry, ComponentResolver, RegistryError,
    ResolvedComponent,
};
pub use transport::{ByteTransport, PassthroughTransport, TransportError};
