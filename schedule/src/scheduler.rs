use network::Network;

use crate::{Error, ExecuteAll, ExecutionOrder, ExecutionPolicy, NetworkAnalyzer};

/// Produces a legal serial execution order for a network snapshot.
///
/// Stateless; every call re-derives the order from the snapshot passed in,
/// so it is safe to call repeatedly as the network is edited. Scheduling is
/// all-or-nothing: on a structural error no partial order is returned.
#[derive(Debug, Default, Clone, Copy)]
pub struct SerialScheduler;

impl SerialScheduler {
    /// Schedule every module in the network.
    pub fn schedule(&self, net: &Network) -> Result<ExecutionOrder, Error> {
        self.schedule_with(net, &ExecuteAll)
    }

    /// Schedule the modules selected by `policy`.
    pub fn schedule_with(
        &self,
        net: &Network,
        policy: &dyn ExecutionPolicy,
    ) -> Result<ExecutionOrder, Error> {
        let analyzer = NetworkAnalyzer::analyze(net)?;
        let graph = analyzer.graph();

        let mut modules = Vec::with_capacity(graph.len());
        for &vertex in analyzer.order() {
            if policy.is_included(graph, vertex) {
                modules.push(analyzer.module_at(vertex));
            } else {
                log::trace!("policy skipped module {}", analyzer.module_at(vertex));
            }
        }

        let order = ExecutionOrder::new(modules);
        log::debug!("scheduled {} of {} modules: {order}", order.len(), graph.len());
        Ok(order)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_empty_network_yields_empty_order() {
        let net = Network::default();
        let order = SerialScheduler.schedule(&net).unwrap();
        assert!(order.is_empty());
    }

    #[test]
    fn test_schedule_holds_no_state_between_calls() {
        let mut net = Network::default();
        let a = net.add_module("A", &[], &["out"]);
        let b = net.add_module("B", &["in"], &[]);
        let conn = net.connect(a, 0, b, 0).unwrap();

        let first = SerialScheduler.schedule(&net).unwrap();
        assert_eq!(first.as_slice(), &[a, b]);

        // edit the network and re-schedule; the new pass sees only the edit:
        net.disconnect(conn).unwrap();
        net.disconnect_module(b);
        net.remove_module(b).unwrap();
        let second = SerialScheduler.schedule(&net).unwrap();
        assert_eq!(second.as_slice(), &[a]);
    }
}
