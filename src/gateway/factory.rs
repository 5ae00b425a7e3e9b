use crate::gateway::events::EventPublisher;
use crate::gateway::logs::LogPublisher;

pub(crate) fn create_publisher() -> Box<dyn EventPublisher> {
    Box::new(LogPublisher::new())
}
