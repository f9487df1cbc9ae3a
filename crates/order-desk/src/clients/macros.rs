/// Declares a typed store client, its [`ActorClient`](resource_actor::ActorClient) impl and a
/// `<name>_store(buffer)` factory returning the actor together with the client.
///
/// ```rust,ignore
/// store_client!(CustomerClient, Customer, customer);
/// let (actor, client) = customer_store(32);
/// ```
macro_rules! store_client {
    ($client:ident, $entity:ident, $snake:ident) => {
        paste::paste! {
            #[doc = "Typed client for the `" $entity "` store."]
            #[derive(Clone)]
            pub struct $client {
                inner: resource_actor::ResourceClient<$entity>,
            }

            impl $client {
                pub fn new(inner: resource_actor::ResourceClient<$entity>) -> Self {
                    Self { inner }
                }
            }

            #[async_trait::async_trait]
            impl resource_actor::ActorClient<$entity> for $client {
                type Error = $crate::error::StoreError;

                fn inner(&self) -> &resource_actor::ResourceClient<$entity> {
                    &self.inner
                }

                fn map_error(e: resource_actor::FrameworkError) -> Self::Error {
                    $crate::error::StoreError::from_framework(stringify!($entity), e)
                }
            }

            #[doc = "Creates the `" $entity "` store actor and its typed client."]
            pub fn [<$snake _store>](
                buffer: usize,
            ) -> (resource_actor::ResourceActor<$entity>, $client) {
                let (actor, inner) = resource_actor::ResourceActor::new(buffer);
                (actor, $client::new(inner))
            }
        }
    };
}

pub(crate) use store_client;
