//! Macros for declaring machines with bare identifiers.

/// Build a [`MachineDefinition`](crate::MachineDefinition) from a list of
/// declarations.
///
/// - `from => to: name;` declares a transition, declaring either state on
///   first use. When `from` names a group the transition fans out to every
///   member.
/// - `state a, b;` declares states without transitions.
/// - `group name { ... }` declares the enclosed states as a group.
///
/// Expands to a `Result<MachineDefinition, MachineError>`.
///
/// # Example
///
/// ```
/// use statecraft::define_machine;
///
/// let definition = define_machine! {
///     group creative_process {
///         no_idea => idea: get_inspired;
///         idea => working: get_motivated;
///         idea => panic: procrastinate;
///     }
///     working => success: just_do_it;
///     panic => success: crunch_it;
///     creative_process => failure: give_up;
/// }
/// .unwrap();
///
/// assert_eq!(definition.initial_state().unwrap(), "no_idea");
/// assert_eq!(definition.transitions().len(), 9);
/// ```
#[macro_export]
macro_rules! define_machine {
    ($($body:tt)*) => {
        $crate::MachineDefinition::define(|scope| {
            $crate::__machine_body!(scope; $($body)*);
            Ok(())
        })
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __machine_body {
    ($scope:ident;) => {
        let _ = &$scope;
    };

    ($scope:ident; group $group:ident { $($inner:tt)* } $($rest:tt)*) => {
        $scope.group(stringify!($group), |inner| {
            $crate::__machine_body!(inner; $($inner)*);
            Ok(())
        })?;
        $crate::__machine_body!($scope; $($rest)*);
    };

    ($scope:ident; state $($name:ident),+ ; $($rest:tt)*) => {
        $( $scope.state(stringify!($name))?; )+
        $crate::__machine_body!($scope; $($rest)*);
    };

    ($scope:ident; $from:ident => $to:ident : $name:ident ; $($rest:tt)*) => {
        $scope.connect(stringify!($from), stringify!($to), stringify!($name))?;
        $crate::__machine_body!($scope; $($rest)*);
    };
}
